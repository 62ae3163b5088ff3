use lang_basics::{hello, write_hello, GREETING};

#[test]
fn test_write_hello_repeated() {
    let mut buf = Vec::new();
    for _ in 0..3 {
        write_hello(&mut buf).unwrap();
    }
    assert_eq!(buf, b"Hello\nHello\nHello\n");
}

#[test]
fn test_greeting_has_no_newline() {
    assert_eq!(GREETING, "Hello");
}

#[test_log::test]
fn test_hello_with_logging_enabled() {
    // Byte-exact output is checked in the CLI tests.
    hello();
}
