use crate::{BlockTag, DocumentComparator, InlineSpan, SpanTag};

fn span(tag: SpanTag, text: &str) -> InlineSpan {
    InlineSpan {
        tag,
        text: text.to_string(),
    }
}

#[test]
fn sum_assured_change_replaces_the_whole_value_context() {
    let a = "Sum Assured: Rs. 5,00,000";
    let b = "Sum Assured: Rs. 6,00,000";
    let report = DocumentComparator::new().compare_pages(&[a], &[b]);

    // The pair scores well above the full-match threshold, but the changed
    // amount forces whole-string replacement spans - never an interleaved
    // digit-level diff.
    assert_eq!(report.blocks.len(), 1);
    assert_eq!(report.blocks[0].tag, BlockTag::Same);
    assert_eq!(
        report.blocks[0].spans,
        vec![span(SpanTag::Removed, a), span(SpanTag::New, b)]
    );
}

#[test]
fn decimal_rate_change_triggers_the_override() {
    let a = "Rate 1.25 percent applies";
    let b = "Rate 1.50 percent applies";
    let report = DocumentComparator::new().compare_pages(&[a], &[b]);

    assert_eq!(report.blocks.len(), 1);
    assert_eq!(
        report.blocks[0].spans,
        vec![span(SpanTag::Removed, a), span(SpanTag::New, b)]
    );
}

#[test]
fn date_change_triggers_the_override_after_canonicalization() {
    let report = DocumentComparator::new()
        .compare_pages(&["Cover starts 5/6/2024 at noon"], &["Cover starts 6/6/2024 at noon"]);

    // Paragraph text is canonicalized during segmentation, so the override
    // spans carry the DD-MM-YYYY rendering.
    assert_eq!(report.blocks.len(), 1);
    assert_eq!(
        report.blocks[0].spans,
        vec![
            span(SpanTag::Removed, "Cover starts 05-06-2024 at noon"),
            span(SpanTag::New, "Cover starts 06-06-2024 at noon"),
        ]
    );
}

#[test]
fn wording_only_change_keeps_the_word_level_diff() {
    let a = "The premium of 4500 is payable annually";
    let b = "The premium of 4500 is payable quarterly";
    let report = DocumentComparator::new().compare_pages(&[a], &[b]);

    assert_eq!(report.blocks.len(), 1);
    let spans = &report.blocks[0].spans;
    // Unchanged numbers do not trigger the override, so the shared prefix
    // survives as a same span.
    assert!(spans.len() > 2);
    assert_eq!(spans[0].tag, SpanTag::Same);
    assert!(spans[0].text.starts_with("The premium of 4500"));
}

#[test]
fn override_html_is_a_clean_two_span_replacement() {
    let report = DocumentComparator::new().compare_pages(&["Total 500"], &["Total 600"]);
    insta::assert_snapshot!(report.to_html(), @r###"<div class="compare-output"><div class="para same"><span class="removed">Total 500</span><span class="new">Total 600</span></div></div>"###);
}
