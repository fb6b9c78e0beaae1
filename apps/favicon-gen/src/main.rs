use brandmark_io::ExportError;

fn main() -> Result<(), ExportError> {
    favicon_gen_lib::init_logging();
    favicon_gen_lib::run()?;
    Ok(())
}
