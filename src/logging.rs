//! Logging setup. The library only emits records through the `log` facade;
//! binaries, benches and tests call [`init`] to see them.

/// Initialize `env_logger`, honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
