pub mod use_coin_list;
