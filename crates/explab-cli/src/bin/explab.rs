fn main() {
    explab_cli::cli::cli_main();
}
