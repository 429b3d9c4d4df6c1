mod comment;
mod feedback;
mod goal;
mod hierarchy;
