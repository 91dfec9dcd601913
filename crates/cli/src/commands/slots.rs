use poolgen_sim::simulation::Slot;

pub fn list_slots() {
    println!("\n🎛  Genesis slots (resolution order):");
    println!("{}", "=".repeat(50));

    for slot in Slot::ALL {
        println!("  • {:<28} {}", slot.name(), slot.default_behavior());
    }

    println!("\n💡 Pin a slot with 'poolgen generate --overrides <file.json>'");
}
