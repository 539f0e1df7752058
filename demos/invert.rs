use log::{info, warn, LevelFilter};
use railway_result::{fail, succeed, Result, StdResultExt};
use simple_logger::SimpleLogger;

#[derive(Debug, thiserror::Error)]
enum InvertError {
    #[error("divide by zero")]
    DivideByZero,
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

fn parse(input: &str) -> Result<InvertError, f64> {
    input
        .parse::<f64>()
        .map_err(|_| InvertError::NotANumber(input.to_string()))
        .railway()
}

fn invert(x: f64) -> Result<InvertError, f64> {
    if x == 0.0 {
        fail(InvertError::DivideByZero)
    } else {
        succeed(1.0 / x)
    }
}

fn report(input: &str) -> String {
    parse(input)
        .then(invert)
        .map(|y| y - 2.0)
        .then(invert)
        .inspect(|y| info!("{input} -> {y}"))
        .inspect_failure(|err| warn!("{input} -> {err}"))
        .extract(|err| err.to_string(), |y| format!("Result: {y}"))
}

fn main() -> Result<log::SetLoggerError, ()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .railway()
        .map(|()| {
            let mut inputs = std::env::args().skip(1).peekable();
            if inputs.peek().is_none() {
                println!("{}", report("0.25"));
                println!("{}", report("0.5"));
            }
            for input in inputs {
                println!("{}", report(&input));
            }
        })
}
