//! Stream decoder behavior across arbitrary chunk boundaries.

mod common;

use common::{decode_all, decode_split, result, results_payload, sse_body};
use ragchat::models::SearchResultSet;
use ragchat::sse::{decode, DecodeError, DecodedEvent};
use ragchat::error::{ChatError, TransportError};

use bytes::Bytes;
use futures_util::StreamExt;

fn mixed_body() -> Vec<u8> {
    let results = results_payload(&[
        result("Ankara, Türkiye'nin başkentidir.", 0.91, true),
        result("İzmir bir liman şehridir 🚢", 0.12, false),
    ]);
    let mut body = b": keep-alive\n\nevent: message\n".to_vec();
    body.extend(sse_body(&[
        &results,
        "Türkiye'nin başkenti ",
        "Ankara'dır. ",
        "Nüfusu yaklaşık 5,8 milyondur 🙂",
    ]));
    body
}

#[test]
fn test_every_two_way_split_gives_same_events() {
    let body = mixed_body();
    let whole = decode_split(&body, &[]);
    assert!(whole.error.is_none());
    assert_eq!(whole.events.len(), 4);

    for cut in 0..=body.len() {
        assert_eq!(decode_split(&body, &[cut]), whole, "split at byte {}", cut);
    }
}

#[test]
fn test_every_three_way_split_gives_same_events() {
    let body = sse_body(&["çğ", "__SEARCH_RESULTS__[]__END_SEARCH__", "€𝄞"]);
    let whole = decode_split(&body, &[]);

    for a in 0..=body.len() {
        for b in a..=body.len() {
            assert_eq!(decode_split(&body, &[a, b]), whole, "split at {} and {}", a, b);
        }
    }
}

#[test]
fn test_single_byte_chunks() {
    let body = mixed_body();
    assert_eq!(decode_all(&body, 1), decode_split(&body, &[]));
}

#[test]
fn test_text_reconstruction() {
    let decoded = decode_all(&mixed_body(), 5);
    assert_eq!(
        decoded.text(),
        "Türkiye'nin başkenti Ankara'dır. Nüfusu yaklaşık 5,8 milyondur 🙂"
    );

    let sets = decoded.result_sets();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].len(), 2);
    assert!(sets[0].get(0).unwrap().relevant);
    assert!(!sets[0].get(1).unwrap().relevant);
}

#[test]
fn test_order_is_preserved() {
    let body = sse_body(&["Hello", "__SEARCH_RESULTS__[]__END_SEARCH__", "World"]);
    let decoded = decode_all(&body, 2);
    assert_eq!(
        decoded.events,
        vec![
            DecodedEvent::AppendText("Hello".to_string()),
            DecodedEvent::ResultsReady(SearchResultSet::default()),
            DecodedEvent::AppendText("World".to_string()),
        ]
    );
}

#[test]
fn test_exact_structured_block() {
    let body = sse_body(&[
        r#"__SEARCH_RESULTS__[{"content":"a","score":0.9,"relevant":true}]__END_SEARCH__"#,
    ]);
    let decoded = decode_all(&body, 7);
    assert_eq!(
        decoded.events,
        vec![DecodedEvent::ResultsReady(SearchResultSet::from(vec![
            result("a", 0.9, true)
        ]))]
    );
}

#[test]
fn test_malformed_block_stops_decoding() {
    let body = sse_body(&["before", "__SEARCH_RESULTS__{bad json", "after"]);
    let decoded = decode_all(&body, 4);

    assert_eq!(
        decoded.events,
        vec![DecodedEvent::AppendText("before".to_string())]
    );
    assert!(matches!(
        decoded.error,
        Some(DecodeError::MalformedStructuredBlock { .. })
    ));
}

#[test]
fn test_invalid_json_carries_raw_payload() {
    let body = sse_body(&["__SEARCH_RESULTS__[{\"content\":1}]__END_SEARCH__"]);
    match decode_all(&body, 3).error {
        Some(DecodeError::StructuredPayload { raw, .. }) => assert_eq!(raw, "[{\"content\":1}]"),
        other => panic!("Expected StructuredPayload, got {:?}", other),
    }
}

#[test]
fn test_trailing_partial_line_is_dropped() {
    let mut body = sse_body(&["tam"]);
    body.extend_from_slice(b"data: yar");
    let decoded = decode_all(&body, 3);
    assert_eq!(decoded.text(), "tam");
    assert!(decoded.error.is_none());
}

#[test]
fn test_framing_lines_are_ignored() {
    let body = b"id: 7\nretry: 1000\n: comment\ndata:no-space\nDATA: upper\n\ndata: ok\n".to_vec();
    let decoded = decode_all(&body, 2);
    assert_eq!(
        decoded.events,
        vec![DecodedEvent::AppendText("ok".to_string())]
    );
}

#[test]
fn test_empty_data_line_is_empty_fragment() {
    let decoded = decode_all(b"data: \n", 1);
    assert_eq!(
        decoded.events,
        vec![DecodedEvent::AppendText(String::new())]
    );
}

#[test]
fn test_unfinished_character_at_end() {
    let mut body = sse_body(&["ok"]);
    body.extend_from_slice(&"ş".as_bytes()[..1]);
    let decoded = decode_all(&body, 1);
    assert_eq!(decoded.text(), "ok");
    assert!(matches!(decoded.error, Some(DecodeError::TextDecoding { .. })));
}

#[tokio::test]
async fn test_async_decode_ends_on_transport_error() {
    let chunks: Vec<Result<Bytes, TransportError>> = vec![
        Ok(Bytes::from_static(b"data: bir\n\nda")),
        Ok(Bytes::from_static(b"ta: iki\n")),
        Err(TransportError::Io("connection reset".to_string())),
        Ok(Bytes::from_static(b"data: never\n")),
    ];

    let events: Vec<_> = decode(futures::stream::iter(chunks)).collect().await;

    assert_eq!(
        events,
        vec![
            Ok(DecodedEvent::AppendText("bir".to_string())),
            Ok(DecodedEvent::AppendText("iki".to_string())),
            Err(ChatError::Transport(TransportError::Io(
                "connection reset".to_string()
            ))),
        ]
    );
}
