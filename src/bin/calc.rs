use clap::Parser;
use small_greeter::core::Number;
use small_greeter::utils::logger;
use small_greeter::{GreeterError, Operation};

#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "Add, subtract, multiply or divide two numbers")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Left operand, e.g. 7 or 2.5
    left: String,

    /// One of + - * / (or add, subtract, multiply, divide)
    operation: String,

    /// Right operand
    right: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose, None);

    match calculate(&args) {
        Ok(result) => {
            println!("{}", result);
            Ok(())
        }
        Err(GreeterError::DivideByZero) => {
            // 與其他錯誤不同，除以零的訊息直接寫到 stdout
            println!("{}", GreeterError::DivideByZero);
            std::process::exit(GreeterError::DivideByZero.exit_code());
        }
        Err(e) => {
            tracing::error!("❌ Calculation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn calculate(args: &Args) -> small_greeter::Result<Number> {
    let left: Number = args.left.parse()?;
    let operation: Operation = args.operation.parse()?;
    let right: Number = args.right.parse()?;

    tracing::debug!("{} {} {}", left, operation.symbol(), right);
    operation.apply(left, right)
}
