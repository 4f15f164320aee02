fn main() {
    cfrelease::app::cli::run();
}
