use std::collections::HashSet;

use super::*;

fn quotes(n: usize) -> Vec<Quote> {
    (0..n)
        .map(|i| Quote {
            quote: format!("quote {i}"),
            author: format!("author {i}"),
            theme: None,
        })
        .collect()
}

#[test]
fn len_and_get_cover_exactly_the_index_domain() {
    for n in 0..5 {
        let deck = Deck::new(quotes(n), OrderPolicy::Preserved);

        assert_eq!(deck.len(), n);

        for i in 0..n {
            assert!(deck.get(i).is_ok());
        }

        let res = deck.get(n);
        assert!(res.is_err());
        assert_eq!(res.unwrap_err(), DeckError { index: n, len: n });
    }
}

#[test]
fn empty_deck() {
    let deck = Deck::new(vec![], OrderPolicy::Shuffled);
    assert!(deck.is_empty());
    assert_eq!(deck.len(), 0);
    assert!(deck.get(0).is_err());
}

#[test]
fn preserved_policy_keeps_source_order() {
    let source = quotes(4);
    let deck = Deck::new(source.clone(), OrderPolicy::Preserved);

    for (i, q) in source.iter().enumerate() {
        assert_eq!(deck.get(i).unwrap(), q);
    }
}

#[test]
fn shuffle_is_a_permutation() {
    let source = quotes(20);
    let deck = Deck::new(source.clone(), OrderPolicy::Shuffled);

    assert_eq!(deck.len(), source.len());

    let before: HashSet<Quote> = source.into_iter().collect();
    let after: HashSet<Quote> = deck.iter().cloned().collect();

    assert_eq!(before, after);
}

#[test]
fn shuffled_order_is_stable_after_construction() {
    let deck = Deck::new(quotes(10), OrderPolicy::Shuffled);

    let first_pass: Vec<Quote> = deck.iter().cloned().collect();
    let second_pass: Vec<Quote> = deck.iter().cloned().collect();

    // reading the deck never re-shuffles
    assert_eq!(first_pass, second_pass);

    for (i, q) in first_pass.iter().enumerate() {
        assert_eq!(deck.get(i).unwrap(), q);
    }
}

#[test]
fn two_record_load_remains_retrievable_by_membership() {
    let source = vec![
        Quote {
            quote: "A".to_string(),
            author: "X".to_string(),
            theme: None,
        },
        Quote {
            quote: "B".to_string(),
            author: "Y".to_string(),
            theme: None,
        },
    ];

    let deck = Deck::new(source.clone(), OrderPolicy::Shuffled);

    assert_eq!(deck.len(), 2);

    let members: HashSet<Quote> = deck.iter().cloned().collect();
    assert!(members.contains(&source[0]));
    assert!(members.contains(&source[1]));
}
