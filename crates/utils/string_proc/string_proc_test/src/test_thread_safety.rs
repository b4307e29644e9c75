use string_proc::{
    CaseError, RawInput, Style, converter::ValidatedText, error::ParseStyleError,
    style::StyleDescriptor, word_sequence::WordSequence,
};

const fn assert_send_sync<T: Send + Sync>() {}

const _: () = {
    assert_send_sync::<CaseError>();
    assert_send_sync::<ParseStyleError>();
    assert_send_sync::<Style>();
    assert_send_sync::<StyleDescriptor>();
    assert_send_sync::<RawInput<'static>>();
    assert_send_sync::<ValidatedText<'static>>();
    assert_send_sync::<WordSequence>();
};

#[test]
fn test_convert_from_many_threads() {
    let handles: Vec<_> = Style::ALL
        .into_iter()
        .map(|style| std::thread::spawn(move || string_proc::convert("brew coffee", style)))
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], Ok("brewCoffee".to_string()));
    assert!(results[1].is_err());
    assert_eq!(results[2], Ok("brew.coffee".to_string()));
}
