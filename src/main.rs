fn main() {
    std::process::exit(versionwatch::app::startup::run());
}
