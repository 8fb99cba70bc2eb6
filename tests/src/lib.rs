pub mod mock;

#[cfg(test)]
mod apply;
#[cfg(test)]
mod probe;
