use dice_calc::{tokenize, Expression, Float, RollContext, Token};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

/// Splits `name = expr` into its parts, if the line is a binding.
///
/// The left side must lex as exactly one variable name.
fn binding(line: &str) -> Option<(&str, &str)> {
    let (name, expr) = line.split_once('=')?;
    let name = name.trim();
    let mut tokens = tokenize(name);
    match (tokens.next(), tokens.next()) {
        (Some(Ok(Token::Operand(Expression::Reference(_)))), None) => Some((name, expr)),
        _ => None,
    }
}

fn run(line: &str, vars: &mut HashMap<String, Float>) -> Result<(), dice_calc::ParseError> {
    let mut rolls = Vec::new();

    if let Some((name, expr)) = binding(line) {
        let expr: Expression = expr.parse()?;
        let value = RollContext::new(&*vars, rand::thread_rng())
            .with_sink(&mut rolls)
            .calc(&expr);
        for roll in &rolls {
            println!("  {}", roll);
        }
        println!("{} = {}", name, value);
        vars.insert(name.to_string(), value);
        return Ok(());
    }

    let expr: Expression = line.parse()?;
    let simplified = expr.simplify_with(&*vars);
    if simplified.has_rolls() || !simplified.references().is_empty() {
        println!("{}", simplified);
    }
    let total = simplified.calc(&*vars, rand::thread_rng(), Some(&mut rolls));
    for roll in &rolls {
        println!("  {}", roll);
    }
    println!("= {}", total);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut vars = HashMap::new();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            if let Err(why) = run(&line, &mut vars) {
                eprintln!("Error: {}", why);
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding() {
        assert_eq!(binding("DEX = 3"), Some(("DEX", " 3")));
        assert_eq!(binding("  $gold.total=1d6 * 10"), Some(("$gold.total", "1d6 * 10")));
        assert_eq!(binding("_x =a + 1"), Some(("_x", "a + 1")));
    }

    #[test]
    fn test_not_a_binding() {
        for line in ["1d20 + 2", "3 = 4", "1d6 = 2", "a b = 1", "a + b = 2", " = 5", "2x = 1", "#a = 1"] {
            assert_eq!(binding(line), None, "{}", line);
        }
    }
}
