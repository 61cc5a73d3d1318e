fn main() {
    bevy_flap::game::run();
}
