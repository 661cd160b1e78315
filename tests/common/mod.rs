/// Installs a test logger so `RUST_LOG=trace cargo test` shows lexer and
/// parser traces.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
