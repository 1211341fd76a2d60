use std::io::{BufRead, Read, Write};

use clap::Parser;
use memshell::Shell;

#[derive(Parser)]
#[command(name = "memshell")]
#[command(about = "An in-memory file system shell")]
#[command(version)]
struct Cli {
    /// Execute the script from command line argument
    #[arg(short = 'c')]
    script: Option<String>,

    /// Output results as JSON (stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// Script file to execute
    #[arg()]
    script_file: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let shell = Shell::new();

    // Determine script source: -c, file, piped stdin, or interactive
    let script = if let Some(s) = cli.script {
        s
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else {
        use std::io::IsTerminal;
        if std::io::stdin().is_terminal() {
            run_interactive(&shell).await;
            return;
        }
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).unwrap_or_default();
        buf
    };

    let result = shell.exec(&script).await;

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "stdout": result.stdout,
                "stderr": result.stderr,
                "exitCode": result.exit_code,
            })
        );
    } else {
        if !result.stdout.is_empty() {
            print!("{}", result.stdout);
        }
        if !result.stderr.is_empty() {
            eprint!("{}", result.stderr);
        }
    }

    std::process::exit(result.exit_code);
}

/// Read-eval loop: print the session prompt, read a line, run it, repeat
/// until EOF.
async fn run_interactive(shell: &Shell) {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", shell.prompt().await);
        let _ = std::io::stdout().flush();
        let Some(Ok(line)) = lines.next() else { break };
        if let Some(result) = shell.exec_line(&line).await {
            if !result.stdout.is_empty() {
                print!("{}", result.stdout);
            }
            if !result.stderr.is_empty() {
                eprint!("{}", result.stderr);
            }
        }
    }
}
