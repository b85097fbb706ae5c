#[cfg(test)]
mod utils;
