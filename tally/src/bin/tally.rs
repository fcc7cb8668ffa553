use tally::{Key, Session};

fn evalexpr(input: &str) {
    match tally::parse(input) {
        Err(e) => println!("Parse error: {}", e),
        Ok(rpn) => match tally::evaluate(&rpn) {
            Err(e) => println!("Eval error: {}", e),
            Ok(result) => println!("{} = {}", rpn, result),
        },
    }
}

fn feed_line(session: &mut Session, line: &str) {
    for ch in line.chars() {
        if !ch.is_whitespace() {
            session.press(Key::Input(ch));
        }
    }
    session.press(Key::Equals);
}

fn repl() -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|home| home.join(".tally_history"));
    if let Some(path) = &histpath {
        let _ = rl.load_history(path);
    }

    let mut session = Session::new();
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline error: {:?}", e)),
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);
                match input {
                    "q" | "quit" | "exit" => break,
                    "c" | "clear" => {
                        session.press(Key::Clear);
                        continue;
                    }
                    _ => feed_line(&mut session, input),
                }
                if session.errored() || session.previous().is_empty() {
                    println!("{}", session.current());
                } else {
                    println!("{} = {}", session.previous(), session.current());
                }
            }
        }
    }
    if let Some(path) = &histpath {
        let _ = rl.save_history(path);
    }
    Ok(())
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        evalexpr(&input);
        return Ok(());
    }
    repl()
}
