mod test_malformed_command_is_dropped;
mod test_room_fills_then_rejects;
