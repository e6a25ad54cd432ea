mod discovery;
mod fallback;
mod inspection;
