use calculator::commands::parse::OPERATION_FLAGS;
use calculator::model::{MAX_OPERANDS, MIN_OPERANDS};
use clap::{CommandFactory, Parser};

/// Invocations shown at the bottom of the help text.
pub const EXAMPLES: [&str; 3] = [
    "-o summa 5 10 15",
    "--operation subtract 100 20 30 10",
    "-o summa 1 2 3 4 5",
];

// Only the name and about line are read from clap; the calculator scans the
// raw process arguments itself.
#[derive(Parser, Debug)]
#[command(
    name = "calculator",
    bin_name = "calculator",
    disable_help_flag = true,
    disable_version_flag = true
)]
#[command(about = "Аддитивный калькулятор", long_about = None)]
pub struct Cli {}

/// Returns the full help text
pub fn get_help() -> String {
    let cmd = Cli::command();
    let name = cmd.get_name();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();
    let operands = "<операнд1> <операнд2> ... <операндN>";

    let mut output = String::new();
    output.push_str(&format!("{about}\n"));
    output.push_str("Использование:\n");
    for flag in OPERATION_FLAGS {
        output.push_str(&format!("  {name} {flag} <операция> {operands}\n"));
    }

    output.push('\n');
    output.push_str("Поддерживаемые операции:\n");
    output.push_str("  summa    - сложение всех операндов\n");
    output.push_str("  subtract - вычитание из первого операнда всех остальных\n");

    output.push('\n');
    output.push_str("Параметры:\n");
    output.push_str(&format!(
        "  {:<17}задает операцию (обязательный параметр)\n",
        OPERATION_FLAGS.join(", ")
    ));
    output.push_str(&format!(
        "  {:<17}целые числа ({MIN_OPERANDS}-{MAX_OPERANDS} штук, обязательные)\n",
        "операнды"
    ));

    output.push('\n');
    output.push_str("Примеры:\n");
    for example in EXAMPLES {
        output.push_str(&format!("  {name} {example}\n"));
    }

    output
}

pub fn print_help() {
    print!("{}", get_help());
}
