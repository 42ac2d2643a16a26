pub fn init() {
    crate::init();
}

pub mod test_data;

mod test_generators;
mod test_parser;
mod test_runner;
