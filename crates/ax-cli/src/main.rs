fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let exit_code = ax_cli::run_cli_from_args(std::env::args_os());
    std::process::exit(exit_code);
}
