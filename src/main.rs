fn main() -> std::process::ExitCode {
    medapp_lib::run()
}
