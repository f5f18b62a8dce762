use clap::{Parser, Subcommand};
use linsolve::solve;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Solve a system of linear equations
  Solve {
    /// Equations like "2x+3y=5", one per argument
    #[arg(required = true)]
    equations: Vec<String>,
    /// Print the full solution bundle as JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Commands::Solve { equations, json } => {
      let bundle = solve(&equations)?;
      if json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
      } else {
        for assignment in &bundle.solution {
          println!("{} = {}", assignment.variable, assignment.value);
        }
      }
    }
  }

  Ok(())
}
