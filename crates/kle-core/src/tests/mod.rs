mod metadata;
mod rotation;
