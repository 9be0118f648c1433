/// Process adapters driving external command-line tools
mod iq_cli_evaluator;

pub use iq_cli_evaluator::IqCliEvaluator;
