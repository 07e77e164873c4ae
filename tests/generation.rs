use passmint::Error;
use passmint::entropy::OsEntropy;
use passmint::pass::{self, Category, CategorySet, Config, MAX_LENGTH, MIN_LENGTH, Strength};

#[test]
fn generated_password_scores_against_its_config() {
    let config = Config::new(CategorySet::all(), false, MAX_LENGTH).unwrap();
    let password = pass::generate(&config, &mut OsEntropy).unwrap();
    let score = pass::score(&password, config.categories);

    // Full length always earns the length half.
    assert!((50..=100).contains(&score));
    assert!(Strength::from_score(score) >= Strength::Strong);
}

#[test]
fn every_length_in_range_is_honoured() {
    for length in MIN_LENGTH..=MAX_LENGTH {
        let config = Config::new(CategorySet::all(), true, length).unwrap();
        let password = pass::generate(&config, &mut OsEntropy).unwrap();
        assert_eq!(password.chars().count(), length);
    }
}

#[test]
fn ambiguous_chars_never_appear_when_excluded() {
    let config = Config::new(CategorySet::all(), true, MAX_LENGTH).unwrap();
    for _ in 0..200 {
        let password = pass::generate(&config, &mut OsEntropy).unwrap();
        assert!(!password.chars().any(|c| pass::AMBIGUOUS.contains(&c)));
    }
}

#[test]
fn nothing_selected_is_empty_pool() {
    assert!(pass::build_pool(CategorySet::empty(), false).is_empty());

    let config = Config::new(CategorySet::empty(), false, 12).unwrap();
    assert!(matches!(
        pass::generate(&config, &mut OsEntropy),
        Err(Error::EmptyPool)
    ));
}

#[test]
fn documented_scores() {
    assert_eq!(pass::score("Ab3!", CategorySet::all()), 62);
    assert_eq!(
        pass::score("abcdefgh", CategorySet::empty().with(Category::Lowercase)),
        37
    );
}

#[test]
fn pool_is_order_stable() {
    let a = pass::build_pool(CategorySet::all(), true);
    let b = pass::build_pool(CategorySet::all(), true);
    assert_eq!(a, b);
    assert_eq!(a.first(), Some(&'A'));
}
