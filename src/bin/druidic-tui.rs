// Druidic terminal UI
// Live transliteration with a script selector and legend

#[path = "../tui/mod.rs"]
mod tui;

fn main() -> std::io::Result<()> {
    tui::run()
}
