use schemer::error::{Category, Error};


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

pub fn result<S: AsRef<str>>(s: S) -> String {
    setup();
    match schemer::run(s.as_ref()) {
        Ok(val) => val,
        Err(err) => panic!("{:?} failed: {}", s.as_ref(), err),
    }
}

pub fn error<S: AsRef<str>>(s: S) -> Error {
    setup();
    match schemer::run(s.as_ref()) {
        Ok(val) => panic!("{:?} unexpectedly gave {}", s.as_ref(), val),
        Err(err) => err,
    }
}

pub fn category<S: AsRef<str>>(s: S) -> Category {
    error(s).category()
}
