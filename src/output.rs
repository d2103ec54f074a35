/// Print a line of diagnostic output.
/// Native builds go to stdout; wasm builds go to the browser console.
#[cfg(not(target_arch = "wasm32"))]
macro_rules! rules_println {
    ($($arg:tt)*) => { println!($($arg)*) }
}

#[cfg(target_arch = "wasm32")]
macro_rules! rules_println {
    ($($arg:tt)*) => {
        web_sys::console::log_1(&format!($($arg)*).into())
    }
}

pub(crate) use rules_println;
