fn main() -> std::process::ExitCode {
    exercise_tracker_lib::run()
}
