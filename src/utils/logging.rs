pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // module paths add nothing for a single service binary.
        .with_target(false)
        // output is shipped as json lines, colour codes would corrupt it.
        .with_ansi(false)
        .json()
        .init();
}
