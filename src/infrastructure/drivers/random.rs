use esp_hal::rng::Rng;

/// Read a 64-bit seed from the hardware random number generator.
///
/// Called once at startup so pattern runs differ between boots.
pub fn hardware_seed() -> u64 {
    let rng = Rng::new();
    (u64::from(rng.random()) << 32) | u64::from(rng.random())
}
