fn main() {
    kubik::core::run();
}
