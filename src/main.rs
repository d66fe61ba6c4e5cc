fn main() {
    #[cfg(feature = "csr")]
    taskdeck::start();
}
