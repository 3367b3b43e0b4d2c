#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // backend started with `cargo run -p atelier-backend`
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // served by the backend in production
}
