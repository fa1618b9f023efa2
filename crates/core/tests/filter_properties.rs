use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;
use threadbare_core::{Category, FilterState, Product, ProductId, Size, filter};

const CATEGORIES: &[&str] = &["Hoodie", "T-shirt", "Cap"];
const SIZES: &[&str] = &["S", "M", "L"];
const WORDS: &[&str] = &["Zip", "Classic", "Graphic", "hoodie", "TEE", "Cap"];
const TERMS: &[&str] = &["zip", "HOOD", "tee", "c", "missing"];

fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(
        (
            prop::sample::select(CATEGORIES),
            prop::sample::select(SIZES),
            prop::sample::select(WORDS),
            prop::sample::select(WORDS),
        ),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, size, first, second))| Product {
                id: ProductId::new(i32::try_from(i).unwrap_or(i32::MAX)),
                name: format!("{first} {second}"),
                price: Decimal::from(10),
                category: Category::from(category),
                size: Size::from(size),
                color: None,
                image: String::new(),
                in_stock: true,
            })
            .collect()
    })
}

fn filter_strategy() -> impl Strategy<Value = FilterState> {
    (
        prop::option::of(prop::sample::select(CATEGORIES)),
        prop::option::of(prop::sample::select(SIZES)),
        prop::option::of(prop::sample::select(TERMS)),
    )
        .prop_map(|(category, size, search)| {
            FilterState::new()
                .with_category(category.unwrap_or(""))
                .with_size(size.unwrap_or(""))
                .with_search(search.unwrap_or(""))
        })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn every_result_matches_all_constraints(catalog in catalog_strategy(), state in filter_strategy()) {
        for product in filter(&catalog, &state) {
            if let Some(category) = &state.category {
                prop_assert_eq!(&product.category, category);
            }
            if let Some(size) = &state.size {
                prop_assert_eq!(&product.size, size);
            }
            prop_assert!(product.name.to_lowercase().contains(&state.search.to_lowercase()));
        }
    }

    #[test]
    fn results_are_an_ordered_subsequence_of_the_catalog(catalog in catalog_strategy(), state in filter_strategy()) {
        let results = filter(&catalog, &state);
        let mut remaining = catalog.iter();
        for product in results {
            prop_assert!(remaining.any(|candidate| std::ptr::eq(candidate, product)));
        }
    }

    #[test]
    fn no_matching_product_is_dropped(catalog in catalog_strategy(), state in filter_strategy()) {
        let expected = catalog.iter().filter(|p| state.matches(p)).count();
        prop_assert_eq!(filter(&catalog, &state).len(), expected);
    }
}
