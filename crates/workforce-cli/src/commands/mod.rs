pub mod employee;
pub mod review;
pub mod seed;
pub mod tables;

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
