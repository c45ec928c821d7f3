//! Demo: stacking encryption and compression over a data source
//!
//! Run with: cargo run --bin decorator

use design_patterns::console;
use design_patterns::structural::decorator::{
    CompressionDecorator, DataSource, EncryptionDecorator, MemoryDataSource,
};

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Decorator");

    let record = "Name,Salary\nJohn Smith,100000\nSteven Jobs,912000";

    console::section("Encrypted");
    let mut encrypted = EncryptionDecorator::new(MemoryDataSource::new());
    encrypted.write_data(record);
    console::lines([format!("stored: {:?}", encrypted.inner().raw())]);

    console::section("Compressed then encrypted");
    let mut layered = CompressionDecorator::new(EncryptionDecorator::new(MemoryDataSource::new()));
    layered.write_data("aaaaabbbbbccccc");
    console::lines([
        format!("stored: {:?}", layered.inner().inner().raw()),
        format!("read:   {:?}", layered.read_data()?),
    ]);

    console::section("Round trip");
    console::lines(encrypted.read_data()?.lines());

    Ok(())
}
