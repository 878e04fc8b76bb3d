use email_screen::*;

#[test]
fn test_extract_emails() {
    let text = "Contact me at john@example.com or jane@company.org";
    let emails: Vec<&str> = extract(text).collect();

    assert_eq!(emails, vec!["john@example.com", "jane@company.org"]);
}

#[test]
fn test_extract_empty_input() {
    assert_eq!(extract("").count(), 0);
    assert!(extract_candidates("no addresses here @ all").is_empty());
}

#[test]
fn test_extract_keeps_duplicates_and_case() {
    let text = "a@b.co A@B.CO a@b.co";
    assert_eq!(extract_candidates(text), vec!["a@b.co", "A@B.CO", "a@b.co"]);
}

#[test]
fn test_extract_grammar_edges() {
    // Single-letter TLD never matches
    assert!(extract_candidates("x@host.c").is_empty());
    // Trailing punctuation is not part of the match
    assert_eq!(extract_candidates("mail x@host.com."), vec!["x@host.com"]);
    // Allowed local-part symbols
    assert_eq!(
        extract_candidates("<first.last+tag%x_y-z@sub-domain.example.io>"),
        vec!["first.last+tag%x_y-z@sub-domain.example.io"]
    );
    // Non-ASCII letters break the match
    assert!(extract_candidates("josé@example.com").is_empty());
    assert_eq!(extract_candidates("josé.x@example.com"), vec![".x@example.com"]);
}

#[test]
fn test_extract_with_positions() {
    let text = "to: bob@example.com, cc: amy@example.org";
    let candidates = extract_with_positions(text);

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].address, "bob@example.com");
    assert_eq!(candidates[0].position, 4);
    assert_eq!(candidates[1].address, "amy@example.org");
    assert_eq!(&text[candidates[1].position..], "amy@example.org");
}

#[test]
fn test_extract_unique_mixed_case_example() {
    let text = "contact me at John.Doe@Gmail.com or john.doe@gmail.com, also admin@mailinator.com";

    assert_eq!(
        extract_unique(text),
        vec![
            "John.Doe@Gmail.com",
            "john.doe@gmail.com",
            "admin@mailinator.com"
        ]
    );
}

#[test]
fn test_dedup_keeps_first_occurrence_order() {
    let unique = dedup(["c@x.io", "a@x.io", "c@x.io", "b@x.io", "a@x.io"]);
    assert_eq!(unique, vec!["c@x.io", "a@x.io", "b@x.io"]);
}

#[test]
fn test_dedup_is_idempotent() {
    let once = dedup(["a@x.io", "b@x.io", "a@x.io", "B@x.io"]);
    let twice = dedup(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_dedup_is_order_preserving_subset() {
    let text = "z@q.com y@q.com z@q.com x@q.com y@q.com w@q.com";
    let all = extract_candidates(text);
    let unique = dedup(all.clone());

    // No repeats
    let mut sorted = unique.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), unique.len());

    // Subsequence of the extracted order
    let mut rest = all.iter();
    for value in &unique {
        assert!(rest.any(|v| v == value));
    }
}
