use anyhow::Result;
use easy_input::{demo::ContactForm, register};

fn setup() -> Result<()> {
    // Define the tag first so the form's fields render as they are inserted.
    register()?;
    leptos::mount::mount_to_body(ContactForm);
    Ok(())
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(x) = setup() {
        panic!("error: {x}")
    }
}
