use anyhow::Result;

fn main() -> Result<()> {
    calpad::tui::run()
}
