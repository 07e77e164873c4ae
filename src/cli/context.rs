//! CLI context: resolved settings plus the parsed flags.

use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use passmint::entropy::{EntropySource, SourceKind, urand};
use passmint::pass::{self, Category, CategorySet, Sampling};
use passmint::settings::Settings;
use passmint::{Error, Result};
use zeroize::Zeroize;

use super::{Cli, prompts};

pub struct Context {
    pub settings: Settings,
    settings_path: Option<PathBuf>,
    args: Cli,
}

impl Context {
    pub fn new(args: Cli) -> Self {
        let settings_path = args.config.clone().or_else(Settings::default_path);

        let saved = match (&settings_path, args.default) {
            (Some(path), false) => Settings::load_from(path).unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            }),
            _ => Settings::default(),
        };

        let mut settings = saved;
        apply_flags(&mut settings, &args);

        Self {
            settings,
            settings_path,
            args,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        prompts::set_quiet(self.args.quiet);
        self.handle_save();
        self.check_source();

        let config = self.settings.to_config()?;
        let mut source = self.settings.source.open();
        log::debug!("entropy source: {}", source.name());

        let mut password = pass::generate(&config, &mut source)?;

        let pool_len = pass::build_pool(config.categories, config.exclude_ambiguous).len();
        log::info!(
            "pool of {pool_len} chars, ~{:.1} bits",
            pass::entropy_bits(pool_len, config.length())
        );

        let score = pass::score(&password, config.categories);
        self.output(&mut password)?;
        prompts::strength(score);
        Ok(())
    }

    fn handle_save(&self) {
        if !self.args.save {
            return;
        }
        let Some(path) = &self.settings_path else {
            prompts::warn("No config directory available, settings not saved");
            return;
        };
        if let Err(e) = self.settings.save_to(path) {
            prompts::warn(&format!("Failed to save settings: {e}"));
        }
    }

    fn check_source(&mut self) {
        if self.settings.source == SourceKind::Urandom && !urand::is_available() {
            prompts::warn("Warning: /dev/urandom not available, using the OS random API");
            self.settings.source = SourceKind::Os;
        }
    }

    fn output(&self, password: &mut String) -> Result<()> {
        if self.args.board {
            match copy_to_clipboard(password) {
                Ok(()) => {
                    prompts::clipboard_copied();
                    password.zeroize();
                    return Ok(());
                }
                Err(e) => {
                    if !prompts::clipboard_fallback_prompt(&e.to_string()) {
                        password.zeroize();
                        return Err(e);
                    }
                }
            }
        }

        println!("{password}");
        Ok(())
    }
}

fn copy_to_clipboard(password: &str) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    ctx.set_contents(password.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    // Some backends only hand the data over once it has been read back.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}

/// Layer explicit flags over the loaded settings.
fn apply_flags(settings: &mut Settings, args: &Cli) {
    if let Some(len) = args.length {
        settings.length = len as usize;
    }

    if let Some(sets) = &args.sets {
        settings.categories = sets.iter().copied().collect::<CategorySet>();
    }
    if args.no_special {
        settings.categories.remove(Category::Symbols);
    }

    if args.no_ambiguous {
        settings.exclude_ambiguous = true;
    }
    if args.allow_ambiguous {
        settings.exclude_ambiguous = false;
    }

    if args.exact {
        settings.sampling = Sampling::Rejection;
    }
    if args.urandom {
        settings.source = SourceKind::Urandom;
    }
}
