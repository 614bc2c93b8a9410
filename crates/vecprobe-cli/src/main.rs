use std::process::ExitCode;
use vecprobe_cli::{run, telemetry, RunOutcome};
use vecprobe_core::ProbeConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    telemetry::init_logging();

    let config = match ProbeConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("❌ Error: {e}");
            return ExitCode::from(RunOutcome::Failed.exit_code());
        }
    };

    let outcome = run(&config, std::io::stdout()).await;
    ExitCode::from(outcome.exit_code())
}
