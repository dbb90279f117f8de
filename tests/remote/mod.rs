mod manage_remotes;
mod push_to_remote;
