//! Binary wrapper around the wasm module. There is nothing to mount on
//! non-wasm targets.

fn main() {
    #[cfg(target_arch = "wasm32")]
    certifirma_frontend::boot();
}
