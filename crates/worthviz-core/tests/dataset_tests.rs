// Host-side tests for dataset parsing: the name/URL split, currency
// stripping, and the structured errors for malformed rows.

use worthviz_core::{parse_dataset, parse_row, DatasetError, WorthRange};

#[test]
fn parses_a_full_row() {
    let item = parse_row(
        "Elon Musk https://i.pravatar.cc/150?img=1 52 USA rockets $180,000,000,000",
        1,
    )
    .expect("row should parse");
    assert_eq!(item.name, "Elon Musk");
    assert_eq!(item.photo_url, "https://i.pravatar.cc/150?img=1");
    assert_eq!(item.age, "52");
    assert_eq!(item.country, "USA");
    assert_eq!(item.interest, "rockets");
    assert_eq!(item.net_worth, 180_000_000_000.0);
}

#[test]
fn names_keep_internal_spaces() {
    let item = parse_row(
        "Mary Jane van der Berg https://img.example/p.jpg 41 Netherlands art $5,000",
        1,
    )
    .expect("row should parse");
    assert_eq!(item.name, "Mary Jane van der Berg");
    assert_eq!(item.net_worth, 5000.0);
}

#[test]
fn plain_http_urls_split_too() {
    let item = parse_row("Ada Lovelace http://img.example/ada.png 36 UK mathematics $100", 1)
        .expect("row should parse");
    assert_eq!(item.name, "Ada Lovelace");
    assert_eq!(item.photo_url, "http://img.example/ada.png");
}

#[test]
fn currency_stripping_handles_decimals_and_bare_numbers() {
    let fancy = parse_row("A B https://x/p 1 C d $1,234.56", 1).expect("decimal");
    assert_eq!(fancy.net_worth, 1234.56);
    let bare = parse_row("A B https://x/p 1 C d 999", 1).expect("bare");
    assert_eq!(bare.net_worth, 999.0);
}

#[test]
fn dataset_skips_blank_lines_and_reports_real_line_numbers() {
    let text = "\
Alice Example https://x/a 30 Wonderland tea $10

Bob Builder https://x/b 45 UK construction $nonsense
";
    let err = parse_dataset(text).expect_err("third line is malformed");
    match err {
        DatasetError::BadNetWorth { line, value } => {
            assert_eq!(line, 3, "blank line must still count toward numbering");
            assert_eq!(value, "$nonsense");
        }
        other => panic!("expected BadNetWorth, got {other:?}"),
    }
}

#[test]
fn dataset_parses_every_good_row() {
    let text = "
Alice Example https://x/a 30 Wonderland tea $10
Bob Builder https://x/b 45 UK construction $2,000
Carol Danvers https://x/c 35 USA flying $900,000
";
    let items = parse_dataset(text).expect("all rows well-formed");
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].name, "Bob Builder");
    assert_eq!(items[2].net_worth, 900_000.0);
}

#[test]
fn row_without_a_photo_url_is_rejected() {
    let err = parse_row("Just A Name 52 USA", 7).expect_err("no URL");
    assert!(
        matches!(err, DatasetError::MissingPhotoUrl { line: 7 }),
        "got {err:?}"
    );
}

#[test]
fn url_at_line_start_is_not_a_split_point() {
    // nothing before the URL means no name field
    let err = parse_row("https://x/a 30 Wonderland tea $10", 2).expect_err("no name");
    assert!(matches!(err, DatasetError::MissingPhotoUrl { line: 2 }));
}

#[test]
fn missing_trailing_fields_name_the_first_gap() {
    let err = parse_row("Bob https://x/b 30 UK", 4).expect_err("short row");
    match err {
        DatasetError::MissingField { line, field } => {
            assert_eq!(line, 4);
            assert_eq!(field, "interest");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn unparseable_net_worth_keeps_the_raw_text() {
    let err = parse_row("Bob https://x/b 30 UK golf lots", 9).expect_err("bad worth");
    match err {
        DatasetError::BadNetWorth { line, value } => {
            assert_eq!(line, 9);
            assert_eq!(value, "lots");
        }
        other => panic!("expected BadNetWorth, got {other:?}"),
    }
}

#[test]
fn empty_input_is_an_empty_dataset() {
    assert!(parse_dataset("").expect("empty ok").is_empty());
    assert!(parse_dataset("\n\n  \n").expect("blank ok").is_empty());
}

#[test]
fn worth_range_spans_the_dataset() {
    let text = "
A B https://x/a 1 C d $50
E F https://x/b 2 G h $10
I J https://x/c 3 K l $2,000
";
    let items = parse_dataset(text).expect("rows parse");
    let range = WorthRange::of(&items);
    assert_eq!(range.min, 10.0);
    assert_eq!(range.max, 2000.0);
}

#[test]
fn worth_range_of_nothing_is_zeroed() {
    let range = WorthRange::of(&[]);
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, 0.0);
}
