
use {
    anchor_lang::{prelude::msg, AccountDeserialize, InstructionData, ToAccountMetas},
    anchor_spl::{
        token::ID as TOKEN_PROGRAM_ID,
        token_2022::spl_token_2022::{
            extension::{transfer_hook::TransferHook, BaseStateWithExtensions, StateWithExtensions},
            state::Mint as MintState,
        },
    },
    harness::*,
    litesvm_token::CreateMint,
    solana_sdk::{instruction::Instruction, pubkey::Pubkey, signature::Signer},
    transfer_hook_vault::{self as transfer_hook, error::HookError, HookConfig},
    vault::error::VaultError,
};

const DEPOSIT: u64 = 1_000_000_000;

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn is_initialized() {
    let (mut svm, payer, _user) = boot();

    let tx = initialize_hook(&mut svm, &payer).expect("initialize should succeed");
    msg!("Your transaction signature {}", tx.signature);

    let account = svm.get_account(&config_pda()).expect("config should exist");
    let config = HookConfig::try_deserialize(&mut account.data.as_slice()).unwrap();
    assert_eq!(config.admin, payer.pubkey());
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn initialize_twice_fails() {
    let (mut svm, payer, _user) = boot();

    initialize_hook(&mut svm, &payer).unwrap();
    assert!(initialize_hook(&mut svm, &payer).is_err());
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn unflagged_parties_transfer_freely() {
    let mut h = Harness::new();

    h.deposit(DEPOSIT).expect("deposit should succeed");

    assert_eq!(token_balance(&h.svm, &h.vault_ata), DEPOSIT);
    assert_eq!(token_balance(&h.svm, &h.user_ata), USER_FUNDS - DEPOSIT);
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn whitelisted_user_deposits_into_restricted_vault() {
    let mut h = Harness::new();
    let (payer, user, vault_authority) =
        (h.payer.insecure_clone(), h.user.pubkey(), h.vault_authority);

    msg!("\n6: Whitelist user, restrict vault");
    h.permit(&payer, Permit::AddWhitelisted, user).unwrap();
    h.permit(&payer, Permit::AddRestricted, vault_authority).unwrap();

    let entry = permit_entry(&h.svm, &h.mint, &user).expect("entry should exist");
    assert!(entry.is_whitelisted);
    assert!(!entry.is_restricted);
    assert_eq!(entry.mint, h.mint);

    msg!("\n7: Deposit to vault");
    let result = h.deposit(DEPOSIT);
    assert!(result.is_ok(), "Expected deposit to succeed, but it failed");
    assert_eq!(token_balance(&h.svm, &h.vault_ata), DEPOSIT);
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn unlisted_user_cannot_deposit_into_restricted_vault() {
    let mut h = Harness::new();
    let (payer, vault_authority) = (h.payer.insecure_clone(), h.vault_authority);

    h.permit(&payer, Permit::AddRestricted, vault_authority).unwrap();

    let code = custom_error(h.deposit(DEPOSIT));
    assert_eq!(code, u32::from(HookError::DestinationRestricted));
    assert_eq!(token_balance(&h.svm, &h.vault_ata), 0);
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn removing_a_whitelist_flag_blocks_later_deposits() {
    let mut h = Harness::new();
    let (payer, user, vault_authority) =
        (h.payer.insecure_clone(), h.user.pubkey(), h.vault_authority);

    h.permit(&payer, Permit::AddWhitelisted, user).unwrap();
    h.permit(&payer, Permit::AddRestricted, vault_authority).unwrap();
    h.deposit(DEPOSIT).unwrap();

    h.permit(&payer, Permit::RemoveWhitelisted, user).unwrap();
    let code = custom_error(h.deposit(DEPOSIT / 2));
    assert_eq!(code, u32::from(HookError::DestinationRestricted));

    h.permit(&payer, Permit::RemoveRestricted, vault_authority).unwrap();
    h.deposit(DEPOSIT / 2).expect("unrestricted vault accepts deposits");
    assert_eq!(
        token_balance(&h.svm, &h.vault_ata),
        DEPOSIT + DEPOSIT / 2
    );
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn zero_amount_deposit_is_rejected() {
    let mut h = Harness::new();

    let code = custom_error(h.deposit(0));
    assert_eq!(code, u32::from(VaultError::InvalidAmountZero));
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn zero_amount_withdraw_is_rejected() {
    let mut h = Harness::new();
    let payer = h.payer.insecure_clone();
    let owner_ata = h.create_ata(&payer.pubkey());

    h.deposit(DEPOSIT).unwrap();

    let code = custom_error(h.withdraw(&payer, owner_ata, 0));
    assert_eq!(code, u32::from(VaultError::InvalidAmountZero));
    assert_eq!(token_balance(&h.svm, &h.vault_ata), DEPOSIT);
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn vault_rejects_legacy_token_mint() {
    let (mut svm, payer, _user) = boot();
    let legacy_mint = CreateMint::new(&mut svm, &payer)
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create legacy mint");

    let code = custom_error(initialize_vault(&mut svm, &payer, legacy_mint, TOKEN_PROGRAM_ID));
    assert_eq!(code, u32::from(VaultError::InvalidTokenProgram));

    let (_, vault_state) = vault_pdas(&legacy_mint);
    assert!(svm.get_account(&vault_state).map_or(true, |a| a.data.is_empty()));
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn deposit_through_legacy_token_program_is_rejected() {
    let mut h = Harness::new();

    let code = custom_error(h.deposit_with_program(DEPOSIT, TOKEN_PROGRAM_ID));
    assert_eq!(code, u32::from(VaultError::InvalidTokenProgram));
    assert_eq!(token_balance(&h.svm, &h.user_ata), USER_FUNDS);
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn mint_authority_can_differ_from_payer() {
    let (mut svm, payer, user) = boot();

    let mint = create_hooked_mint(&mut svm, &payer, &user.pubkey()).expect("mint should be created");

    let account = svm.get_account(&mint).expect("mint should exist");
    let state = StateWithExtensions::<MintState>::unpack(&account.data).unwrap();
    assert_eq!(Option::<Pubkey>::from(state.base.mint_authority), Some(user.pubkey()));

    let hook = state.get_extension::<TransferHook>().unwrap();
    assert_eq!(Option::<Pubkey>::from(hook.program_id), Some(TRANSFER_HOOK_PROGRAM_ID));
    assert_eq!(Option::<Pubkey>::from(hook.authority), Some(payer.pubkey()));
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn only_admin_manages_permits() {
    let mut h = Harness::new();
    let user = h.user.insecure_clone();

    let code = custom_error(h.permit(&user, Permit::AddWhitelisted, user.pubkey()));
    assert_eq!(code, u32::from(HookError::Unauthorized));
    assert!(permit_entry(&h.svm, &h.mint, &user.pubkey()).is_none());
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn closing_a_permit_entry_clears_its_flags() {
    let mut h = Harness::new();
    let (payer, vault_authority) = (h.payer.insecure_clone(), h.vault_authority);

    h.permit(&payer, Permit::AddRestricted, vault_authority).unwrap();
    assert!(h.deposit(DEPOSIT).is_err());

    h.close_permit(vault_authority).expect("close should succeed");
    assert!(permit_entry(&h.svm, &h.mint, &vault_authority).is_none());

    h.deposit(DEPOSIT).expect("deposit should succeed once the entry is gone");
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn owner_withdraws_from_unrestricted_vault() {
    let mut h = Harness::new();
    let payer = h.payer.insecure_clone();
    let owner_ata = h.create_ata(&payer.pubkey());

    h.deposit(DEPOSIT).unwrap();
    h.withdraw(&payer, owner_ata, DEPOSIT / 4)
        .expect("withdraw should succeed");

    assert_eq!(token_balance(&h.svm, &owner_ata), DEPOSIT / 4);
    assert_eq!(token_balance(&h.svm, &h.vault_ata), DEPOSIT - DEPOSIT / 4);
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn restricted_vault_pays_out_only_to_whitelisted_owner() {
    let mut h = Harness::new();
    let (payer, user, vault_authority) =
        (h.payer.insecure_clone(), h.user.pubkey(), h.vault_authority);
    let owner_ata = h.create_ata(&payer.pubkey());

    h.permit(&payer, Permit::AddWhitelisted, user).unwrap();
    h.permit(&payer, Permit::AddRestricted, vault_authority).unwrap();
    h.deposit(DEPOSIT).unwrap();

    let code = custom_error(h.withdraw(&payer, owner_ata, DEPOSIT));
    assert_eq!(code, u32::from(HookError::SourceRestricted));

    h.permit(&payer, Permit::AddWhitelisted, payer.pubkey()).unwrap();
    h.withdraw(&payer, owner_ata, DEPOSIT)
        .expect("whitelisted owner should withdraw");
    assert_eq!(token_balance(&h.svm, &h.vault_ata), 0);
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn stranger_cannot_withdraw() {
    let mut h = Harness::new();
    let user = h.user.insecure_clone();

    h.deposit(DEPOSIT).unwrap();

    let code = custom_error(h.withdraw(&user, h.user_ata, DEPOSIT));
    assert_eq!(code, u32::from(VaultError::Unauthorized));
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn withdraw_above_balance_is_rejected() {
    let mut h = Harness::new();
    let payer = h.payer.insecure_clone();
    let owner_ata = h.create_ata(&payer.pubkey());

    h.deposit(DEPOSIT).unwrap();

    let code = custom_error(h.withdraw(&payer, owner_ata, DEPOSIT + 1));
    assert_eq!(code, u32::from(VaultError::InsufficientVaultBalance));
}

#[test]
#[ignore = "requires `anchor build` artifacts in target/deploy"]
fn hook_rejects_direct_invocation() {
    let mut h = Harness::new();
    let user = h.user.insecure_clone();
    let vault_authority = h.vault_authority;

    let ix = Instruction {
        program_id: TRANSFER_HOOK_PROGRAM_ID,
        accounts: transfer_hook::accounts::TransferHook {
            source_token: h.user_ata,
            mint: h.mint,
            destination_token: h.vault_ata,
            owner: user.pubkey(),
            extra_account_meta_list: h.extra_account_meta_list,
            source_permit: permit_pda(&h.mint, &user.pubkey()),
            destination_permit: permit_pda(&h.mint, &vault_authority),
        }
        .to_account_metas(None),
        data: transfer_hook::instruction::TransferHook { amount: DEPOSIT }.data(),
    };

    let code = custom_error(send(&mut h.svm, &user, ix, &[]));
    assert_eq!(code, u32::from(HookError::NotTransferring));
}
