pub mod block_state;
pub mod template;
#[cfg(test)]
mod template_test;
