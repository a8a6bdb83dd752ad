use super::*;

#[test]
fn buffer_handler_println_captures_with_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    assert_eq!(handler.get_output(), "hello\n");
}

#[test]
fn buffer_handler_print_and_println_compose_a_line() {
    let handler = BufferPrintHandler::new();
    handler.print("hello");
    handler.print(" ");
    handler.println("world");
    assert_eq!(handler.get_output(), "hello world\n");
}

#[test]
fn diagnostics_are_kept_apart_from_output() {
    let handler = BufferPrintHandler::new();
    handler.println("out");
    handler.diagnostic("warn");
    assert_eq!(handler.get_output(), "out\n");
    assert_eq!(handler.get_diagnostics(), "warn\n");
}

#[test]
fn buffer_handler_clear_empties_both_channels() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    handler.diagnostic("warn");
    handler.clear();
    assert!(handler.get_output().is_empty());
    assert!(handler.get_diagnostics().is_empty());
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    handler.clear();
    assert_eq!(handler.get_output(), "");
    assert_eq!(handler.get_diagnostics(), "");
}

#[test]
fn silent_handler_discards_everything() {
    let handler = silent_handler();
    handler.println("hello");
    handler.diagnostic("warn");
    assert_eq!(handler.get_output(), "");
    assert_eq!(handler.get_diagnostics(), "");
}

#[test]
fn shared_clones_see_the_same_buffer() {
    let handler = buffer_handler();
    let clone = Arc::clone(&handler);
    clone.println("test");
    assert_eq!(handler.get_output(), "test\n");
}
