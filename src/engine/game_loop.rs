use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Street;
use crate::domain::player::{Player, PlayerStatus};
use crate::domain::stakes::Stakes;
use crate::domain::{HandId, PlayerId, SeatIndex};
use crate::engine::actions::Action;
use crate::engine::betting::BettingRound;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{last_active_in_rotation, next_active_seat, seats_in_hand_from};
use crate::engine::turn::TurnResult;
use crate::engine::validation::validate_action;
use crate::engine::RandomSource;

/// Состояние одной раздачи. Самостоятельное значение: без глобалов,
/// без скрытого разделяемого состояния; раздачи разных столов живут
/// в разных `Hand` и не мешают друг другу.
#[derive(Debug)]
pub struct Hand {
    pub hand_id: HandId,
    /// Игроки в порядке мест; порядок фиксирован на всю раздачу,
    /// место 0 — дилерская кнопка.
    pub players: Vec<Player>,
    pub stakes: Stakes,
    pub dealer: SeatIndex,
    pub deck: Deck,
    /// Общие карты (0..5).
    pub board: Vec<Card>,
    /// Фишки, уже собранные из раундовых вкладов закрытых раундов.
    /// Инвариант раздачи: sum(total_contribution) ==
    /// pot + sum(round_contribution).
    pub pot: Chips,
    pub street: Street,
    /// Чей ход; None — раунд закрыт либо раздача кончилась.
    pub acting: Option<SeatIndex>,
    pub betting: BettingRound,
    /// Раздача рассчитана; любые дальнейшие операции отвергаются.
    pub settled: bool,
    pub history: HandHistory,
}

impl Hand {
    /// Место игрока по id.
    pub fn player_seat(&self, player_id: PlayerId) -> Option<SeatIndex> {
        self.players.iter().position(|p| p.player_id == player_id)
    }

    /// Претенденты на банк (Active + AllIn).
    pub fn contender_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_in_hand()).count()
    }

    /// Сколько игроков ещё могут делать ставки.
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// Общий банк на столе, включая вклады незакрытого раунда.
    pub fn total_pot(&self) -> Chips {
        self.pot
            + self
                .players
                .iter()
                .map(|p| p.round_contribution)
                .sum::<Chips>()
    }

    /// Смести раундовые вклады в банк; возвращает собранную сумму.
    pub(crate) fn collect_round_contributions(&mut self) -> Chips {
        let mut swept = Chips::ZERO;
        for p in &mut self.players {
            swept += p.round_contribution;
            p.round_contribution = Chips::ZERO;
        }
        self.pot += swept;
        swept
    }
}

/// Начать раздачу: перетасовать колоду, снять анте и блайнды, раздать
/// карманные карты и определить первого актёра.
///
/// Порядок `players` — рассадка; место 0 — кнопка. Хедз-ап: дилер
/// на малом блайнде и ходит первым на префлопе (см. DESIGN.md).
/// Короткий стек постит блайнд неполным и сразу уходит в all-in.
pub fn start_hand<R: RandomSource>(
    mut players: Vec<Player>,
    stakes: Stakes,
    rng: &mut R,
    hand_id: HandId,
) -> Result<Hand, EngineError> {
    if players.len() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }
    stakes.validate().map_err(EngineError::InvalidStakes)?;

    // Каждый входит в раздачу активным, с чистыми вкладами и без карт.
    for p in players.iter_mut() {
        p.status = PlayerStatus::Active;
        p.round_contribution = Chips::ZERO;
        p.total_contribution = Chips::ZERO;
        p.hole_cards.clear();
    }

    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);

    let dealer: SeatIndex = 0;
    let mut hand = Hand {
        hand_id,
        players,
        stakes,
        dealer,
        deck,
        board: Vec::new(),
        pot: Chips::ZERO,
        street: Street::Preflop,
        acting: None,
        betting: BettingRound::new(Street::Preflop, stakes.big_blind),
        settled: false,
        history: HandHistory::new(),
    };

    hand.history.push(HandEventKind::HandStarted {
        hand_id,
        players: hand.players.iter().map(|p| p.player_id).collect(),
    });

    let order = seats_in_hand_from(&hand.players, dealer);
    // Хедз-ап: дилер на малом блайнде; иначе SB/BB слева от кнопки.
    let (sb_seat, bb_seat) = if order.len() == 2 {
        (order[0], order[1])
    } else {
        (order[1], order[2])
    };

    // Анте — напрямую в банк, мимо раундовых вкладов.
    let mut antes = Vec::new();
    if !hand.stakes.ante.is_zero() {
        let ante = hand.stakes.ante;
        for &seat in &order {
            let paid = post_ante(&mut hand.players[seat], ante);
            if !paid.is_zero() {
                hand.pot += paid;
                antes.push((seat, paid));
            }
        }
    }

    let sb_paid = hand.players[sb_seat].commit_up_to(hand.stakes.small_blind);
    let bb_paid = hand.players[bb_seat].commit_up_to(hand.stakes.big_blind);

    hand.betting.current_bet = hand.stakes.big_blind;
    // BB закрывает префлоп, пока никто не рейзил, и ещё не высказался.
    hand.betting.closing_seat = Some(bb_seat);

    hand.history.push(HandEventKind::BlindsPosted {
        dealer,
        small_blind: (sb_seat, sb_paid),
        big_blind: (bb_seat, bb_paid),
        antes,
    });

    deal_hole_cards(&mut hand);

    // Первым ходит сосед BB слева (хедз-ап это дилер).
    hand.acting = next_active_seat(&hand.players, bb_seat);
    if let Some(seat) = hand.acting {
        hand.history.push(HandEventKind::TurnPrompted {
            seat,
            player_id: hand.players[seat].player_id,
        });
    }

    log::debug!(
        "раздача {hand_id}: старт, игроков {}, SB {sb_paid}, BB {bb_paid}",
        hand.players.len()
    );

    Ok(hand)
}

/// Анте: принудительный взнос сразу в банк (total растёт, round — нет).
fn post_ante(player: &mut Player, amount: Chips) -> Chips {
    let real = amount.min(player.wallet.balance());
    if player.wallet.debit(real).is_err() {
        return Chips::ZERO;
    }
    player.total_contribution += real;
    if player.wallet.balance().is_zero() {
        player.status = PlayerStatus::AllIn;
    }
    real
}

/// Карманные карты: по одной по кругу от соседа кнопки, два круга.
fn deal_hole_cards(hand: &mut Hand) {
    let first = (hand.dealer + 1) % hand.players.len();
    let order = seats_in_hand_from(&hand.players, first);
    for _ in 0..2 {
        for &seat in &order {
            if let Some(card) = hand.deck.draw_one() {
                hand.players[seat].hole_cards.push(card);
            }
        }
    }
    for &seat in &order {
        hand.history.push(HandEventKind::HoleCardsDealt {
            seat,
            cards: hand.players[seat].hole_cards.clone(),
        });
    }
}

/// Применить действие игрока. При ошибке состояние раздачи не меняется;
/// `InsufficientFunds` на call означает, что хост должен прислать
/// all-in вместо call.
pub fn apply_action(
    hand: &mut Hand,
    player_id: PlayerId,
    action: Action,
) -> Result<TurnResult, EngineError> {
    if hand.settled {
        return Err(EngineError::HandAlreadySettled);
    }
    let seat = hand
        .player_seat(player_id)
        .ok_or(EngineError::PlayerNotInHand(player_id))?;
    if hand.acting != Some(seat) {
        return Err(EngineError::NotPlayersTurn(player_id));
    }
    validate_action(&hand.players[seat], &action, &hand.betting)?;

    let moved = match action {
        Action::Fold => {
            hand.betting.fold(&mut hand.players[seat]);
            Chips::ZERO
        }
        Action::Check | Action::Call => hand.betting.call_or_check(&mut hand.players[seat])?,
        Action::Bet(total) | Action::Raise(total) => {
            hand.betting.bet_or_raise(&mut hand.players[seat], seat, total)?
        }
        Action::AllIn => hand.betting.all_in(&mut hand.players[seat], seat)?,
    };
    hand.betting.mark_acted(seat);

    hand.history.push(HandEventKind::PlayerActed {
        seat,
        player_id,
        action,
        moved,
        pot_after: hand.total_pot(),
    });

    if hand.contender_count() <= 1 {
        hand.acting = None;
        return Ok(TurnResult::EndHand);
    }
    if hand.betting.is_round_closed(&hand.players) {
        hand.acting = None;
        return Ok(TurnResult::EndRound);
    }

    let next = next_active_seat(&hand.players, seat)
        .ok_or(EngineError::Internal("открытый раунд без следующего актёра"))?;
    hand.acting = Some(next);
    hand.history.push(HandEventKind::TurnPrompted {
        seat: next,
        player_id: hand.players[next].player_id,
    });
    Ok(TurnResult::ContinueRound(next))
}

/// Закрыть раунд и открыть следующую улицу: раундовые вклады — в банк,
/// новые общие карты — на борд (флоп 3, тёрн 1, ривер 1, шоудаун 0).
///
/// Если ставить могут меньше двух игроков, улица открывается без
/// торговли: хост продолжает звать advance_street до шоудауна.
pub fn advance_street(hand: &mut Hand) -> Result<(Street, Vec<Card>), EngineError> {
    if hand.settled {
        return Err(EngineError::HandAlreadySettled);
    }
    if !hand.betting.is_round_closed(&hand.players) {
        return Err(EngineError::BettingStillOpen);
    }
    let next = hand.street.next().ok_or(EngineError::NoSuchStreet(hand.street))?;

    hand.collect_round_contributions();
    let dealt = hand.deck.draw_n(next.cards_to_deal());
    hand.board.extend(dealt.iter().copied());
    hand.street = next;
    hand.betting = BettingRound::new(next, hand.stakes.big_blind);

    hand.history.push(HandEventKind::StreetDealt {
        street: next,
        cards: dealt.clone(),
    });

    // Торговля возможна, только если активных хотя бы двое
    // и улица не шоудаун.
    hand.acting = None;
    if next != Street::Showdown && hand.active_count() >= 2 {
        // Первый активный слева от дилера (хедз-ап — не-дилер).
        if let Some(first) = next_active_seat(&hand.players, hand.dealer) {
            hand.acting = Some(first);
            hand.betting.closing_seat = last_active_in_rotation(&hand.players, first);
            hand.history.push(HandEventKind::TurnPrompted {
                seat: first,
                player_id: hand.players[first].player_id,
            });
        }
    }

    log::debug!(
        "раздача {}: улица {:?}, банк {}",
        hand.hand_id,
        next,
        hand.pot
    );

    Ok((next, dealt))
}
