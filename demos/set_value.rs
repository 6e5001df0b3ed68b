use inifile::Editor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = String::from(
        "# deployment settings\n\
         [server]\n\
         port    = 8080\n\
         host    = localhost\n\
         \n\
         [client]\n\
         retries = 2\n",
    );

    println!("--- before ---\n{config}");

    Editor::update(&mut config, |editor| {
        // Updates keep the original spacing of the line they touch
        editor.set("server", "port", "9090");
        // Missing keys are inserted into the section, missing sections appended
        editor.set("client", "timeout_ms", "250");
        editor.set("metrics", "enabled", "true");
        Ok(())
    })?;

    println!("--- after ---\n{config}");

    Ok(())
}
