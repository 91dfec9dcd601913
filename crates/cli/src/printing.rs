use poolgen_sim::prelude::GenesisState;

pub fn print_genesis(genesis: &GenesisState) {
    let params = &genesis.params;

    println!("\n📋 Module Parameters");
    for pt in &params.liquidity_pool_types {
        println!(
            "  • Pool Type {}: {} (reserve coins {}..={})",
            pt.pool_type_index, pt.name, pt.min_reserve_coin_num, pt.max_reserve_coin_num
        );
    }
    println!(
        "  • Min Initial Deposit: {} [min_init_deposit_to_pool]",
        params.min_init_deposit_to_pool
    );
    println!(
        "  • Initial Pool Coin Mint: {} [init_pool_coin_mint_amount]",
        params.init_pool_coin_mint_amount
    );
    println!(
        "  • Pool Creation Fee: {} [liquidity_pool_creation_fee]",
        params.liquidity_pool_creation_fee
    );
    println!("  • Swap Fee Rate: {} [swap_fee_rate]", params.swap_fee_rate);
    println!(
        "  • Withdraw Fee Rate: {} [withdraw_fee_rate]",
        params.withdraw_fee_rate
    );
    println!(
        "  • Max Order Amount Ratio: {} [max_order_amount_ratio]",
        params.max_order_amount_ratio
    );
    println!("  • Unit Batch Size: {} [unit_batch_size]", params.unit_batch_size);

    println!("\n🏊 Seed Pools");
    for record in &genesis.liquidity_pool_records {
        let pool = &record.liquidity_pool;
        println!(
            "  • Pool {} (type {}): {}",
            pool.pool_id,
            pool.pool_type_index,
            pool.reserve_coin_denoms.join("/")
        );
        println!("    - Reserve Account: {}", pool.reserve_account_address);
        println!("    - Pool Coin Denom: {}", pool.pool_coin_denom);
        println!(
            "    - Queued: {} deposit(s), {} withdrawal(s), {} swap(s)",
            record.batch_pool_deposit_msgs.len(),
            record.batch_pool_withdraw_msgs.len(),
            record.batch_pool_swap_msgs.len()
        );
    }
    println!();
}
