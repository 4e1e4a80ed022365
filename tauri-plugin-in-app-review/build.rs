const COMMANDS: &[&str] = &["is_available", "request_review", "open_store_listing"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
