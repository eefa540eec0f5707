use std::process::ExitCode;

use shell_tmpl::parse::dump;
use shell_tmpl::prelude::*;
use tracing_subscriber::EnvFilter;

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let text = run_text(&sx_cmd!("echo {}", "foo\nbar")?).await?;
    println!("{}", text);

    let lines = run_lines(&sx_cmd!("echo {}", "foo\nbar")?).await?;
    println!("{}", dump(Some(&lines)));

    let name: serde_json::Value = run_json(&sx_cmd!("cargo metadata --no-deps --format-version 1")?).await?;
    println!("{}", dump(name.pointer("/packages/0/name")));

    let files = run_null_separated(&sx_cmd!("find . -maxdepth 1 -type f -print0")?).await?;
    println!("{}", dump(Some(&files)));

    let inception = run_text(&sx_cmd!("sh -c {}", esc_dash(&sx_cmd!("echo {}", "foo bar")?))?).await?;
    println!("{}", inception);

    let table = run_fields(&sx_cmd!("ls -l {}", "src")?).await?;
    println!("{}", dump(Some(&table)));

    let ascii: String = (0u8..128).map(char::from).collect();
    let quoted = run_text(&sx_cmd!("printf '%q' {}", ascii)?).await?;
    println!("{}", quoted);

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            let code = err
                .downcast_ref::<ExecError>()
                .and_then(ExecError::exit_code)
                .and_then(|c| u8::try_from(c).ok())
                .filter(|&c| c != 0)
                .unwrap_or(255);
            ExitCode::from(code)
        }
    }
}
