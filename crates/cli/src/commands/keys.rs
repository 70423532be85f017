use anyhow::{Context, Result};
use polyrun_core::keys::{ConsoleKeyReader, KeyTester};

pub fn keys_wait_command(json: bool) -> Result<()> {
    let event = polyrun_core::wait_for_key().context("Failed to read a key")?;

    if json {
        println!("{}", serde_json::to_string(&event)?);
    } else {
        println!("{}", event.report());
    }

    Ok(())
}

pub fn keys_test_command() -> Result<()> {
    // Only Windows consoles report key releases
    let tester = KeyTester::new(cfg!(windows));
    let mut reader = ConsoleKeyReader::new().context("Failed to open the console")?;
    let stdout = std::io::stdout();
    tester.run(&mut reader, &mut stdout.lock())?;
    Ok(())
}
